//! The sample e-commerce document shipped with the viewer.

use crate::error::ParseError;
use crate::parse::{self, OpenApiDocument};

/// YAML source of the sample document: authentication, products, orders.
pub const SAMPLE_ECOMMERCE_YAML: &str = include_str!("../data/ecommerce.yaml");

pub fn sample_document() -> Result<OpenApiDocument, ParseError> {
    parse::from_yaml(SAMPLE_ECOMMERCE_YAML)
}
