pub mod format;
pub mod identify;
pub mod normalize;
pub mod parse;
pub mod schemas;
pub mod validate;
