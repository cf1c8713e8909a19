use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub app: &'static str,
    pub version: &'static str,
}

impl Health {
    pub fn current() -> Self {
        Self { status: "healthy", app: "Gallinapp", version: "1.0" }
    }
}
