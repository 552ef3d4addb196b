mod deps {
    pub use object_mapper as mapper;
}

use deps::mapper::{Mappable, Mapper, reflect};

#[derive(Default, Mappable)]
#[mapper(crate = "deps::mapper")]
struct Target {
    name: String,
}

#[reflect(crate = "deps::mapper")]
impl Target {
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

fn main() {
    let source = deps::mapper::AttributeBag::new()
        .with("name", deps::mapper::Value::new(String::from("Ann")));
    let mut target = Target::default();
    let name = Mapper::new()
        .map(&mut target)
        .fill(&source)
        .map(|t| t.name.clone());
    assert_eq!(name.ok().as_deref(), Some("Ann"));
}
