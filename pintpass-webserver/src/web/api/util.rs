use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.inner().0
}
