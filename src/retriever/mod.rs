pub mod assembler;
pub mod identifiers;
pub mod locale;
pub mod pipeline;
pub mod resolver;
