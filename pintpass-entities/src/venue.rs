/// A place users can check in at.
///
/// Venues are read-only reference data from the perspective of the
/// check-in pipeline.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id          : i64,
    pub name        : String,
    pub address     : String,
    pub lat         : String,
    pub lng         : String,
    pub image_url   : Option<String>,
    pub description : Option<String>,
    pub rating      : Option<i32>,
    pub distance    : Option<String>,
}
