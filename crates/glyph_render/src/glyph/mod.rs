pub mod frame;
pub mod mapping;
pub mod markup;
pub mod output;
pub mod palette;
