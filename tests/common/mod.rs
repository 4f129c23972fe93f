#![allow(dead_code)]

pub mod adapter;
pub mod asserts;
pub mod builders;
pub mod headers;
