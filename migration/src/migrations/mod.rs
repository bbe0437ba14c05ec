pub mod m202610170001_create_examples;
