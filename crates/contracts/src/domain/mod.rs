pub mod common;

pub mod a001_bill_of_lading;
