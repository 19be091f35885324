#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_wasm::content::{Category, Project};
use portfolio_wasm::rng::RandomSource;
use portfolio_wasm::scroll_lock::ScrollHost;

/// Cycles through fixed samples.
pub struct Script {
    values: Vec<f64>,
    pos: usize,
}

impl Script {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Script {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

/// Body stand-in whose overflow value the test can observe.
#[derive(Clone, Default)]
pub struct FakeBody {
    pub overflow: Rc<RefCell<String>>,
}

impl FakeBody {
    pub fn with(value: &str) -> Self {
        Self {
            overflow: Rc::new(RefCell::new(value.to_string())),
        }
    }

    pub fn get(&self) -> String {
        self.overflow.borrow().clone()
    }
}

impl ScrollHost for FakeBody {
    fn overflow(&self) -> String {
        self.get()
    }

    fn set_overflow(&mut self, value: &str) {
        *self.overflow.borrow_mut() = value.to_string();
    }
}

pub fn project(id: &str, images: &[&str], scroll: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        description: "test".to_string(),
        category: Category::Samples,
        images: images.iter().map(|s| s.to_string()).collect(),
        scroll_images: scroll.iter().map(|s| s.to_string()).collect(),
    }
}
