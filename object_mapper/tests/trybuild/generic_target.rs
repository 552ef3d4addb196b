use object_mapper::{Mappable, Mapper, reflect};

#[derive(Debug, Default, Mappable)]
struct Slot<T> {
    value: T,
}

#[reflect]
impl<T: Clone + 'static> Slot<T> {
    pub fn get_value(&self) -> T {
        self.value.clone()
    }
}

fn main() {
    let source = Slot { value: 3_i32 };
    let mut target = Slot::<i32>::default();
    let filled = Mapper::new().map(&mut target).fill(&source).map(|slot| slot.value);
    assert_eq!(filled.ok(), Some(3));
}
