pub mod omnivore;
