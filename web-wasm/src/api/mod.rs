//! カタログAPI呼び出し

pub mod catalog;
