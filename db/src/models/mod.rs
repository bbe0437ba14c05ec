pub mod example;

pub use example::Entity as Example;
