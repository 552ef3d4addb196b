use std::cell::Cell;

use object_mapper::{Mappable, Reflect as _, reflect};

#[derive(Mappable)]
struct Cached {
    id: u64,
    #[mapper(skip)]
    hits: Cell<u64>,
}

#[reflect]
impl Cached {
    pub fn get_id(&self) -> u64 {
        self.hits.set(self.hits.get() + 1);
        self.id
    }

    #[reflect(skip)]
    pub fn get_hits(&self) -> Option<&Cell<u64>> {
        Some(&self.hits)
    }

    pub fn blank() -> Self {
        Self { id: 0, hits: Cell::new(0) }
    }
}

fn main() {
    assert_eq!(Cached::declared_fields(), ["id"]);
    let names: Vec<_> = Cached::methods().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["get_id", "blank"]);
}
