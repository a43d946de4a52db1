/// Plain-text password used for every technician fixture.
pub static TEST_PASSWORD: &str = "hunter22";
