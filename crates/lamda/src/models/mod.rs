pub mod lamda;

pub mod classifier_trait;
