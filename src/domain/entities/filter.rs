use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Price,
    Brand,
}

/// Raw filter inputs as typed; only the submitted field drives a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub price: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInputError {
    InvalidPrice(String),
}

impl std::fmt::Display for FilterInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterInputError::InvalidPrice(raw) => {
                write!(f, "price filter must be a number, got \"{raw}\"")
            }
        }
    }
}

impl std::error::Error for FilterInputError {}

/// The single key/value pair the `filter` action accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldFilter {
    Name { name: String },
    Price { price: f64 },
    Brand { brand: String },
}

impl FilterCriteria {
    pub fn field_filter(&self, field: FilterField) -> Result<FieldFilter, FilterInputError> {
        match field {
            FilterField::Name => Ok(FieldFilter::Name {
                name: self.name.clone(),
            }),
            FilterField::Brand => Ok(FieldFilter::Brand {
                brand: self.brand.clone(),
            }),
            FilterField::Price => match self.price.trim().parse::<f64>() {
                Ok(price) if price.is_finite() => Ok(FieldFilter::Price { price }),
                _ => Err(FilterInputError::InvalidPrice(self.price.clone())),
            },
        }
    }
}
