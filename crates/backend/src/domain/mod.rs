pub mod a001_bill_of_lading;
