// Example: lay out a circular pager and print the placed items.
use arcpager::{
    Gravity, ItemHost, ItemSize, ItemSlot, Pager, PagerOptions, PlacedItem, Viewport,
};

struct PrintHost;

impl ItemHost for PrintHost {
    fn measure_item(&mut self, index: usize) -> ItemSize {
        println!("measure index={index}");
        ItemSize {
            main: 240.0,
            cross: 320.0,
        }
    }

    fn place_item(&mut self, item: &PlacedItem) {
        println!(
            "place position={} index={} target={:.1} rotation={:.1} elevation={:.2} frame={:?}",
            item.slot.position,
            item.slot.index,
            item.target_offset,
            item.transform.rotation,
            item.transform.elevation,
            item.frame,
        );
    }

    fn recycle_item(&mut self, slot: ItemSlot) {
        println!("recycle position={} index={}", slot.position, slot.index);
    }
}

fn main() {
    let options = PagerOptions::new()
        .with_gravity(Gravity::Bottom)
        .with_infinite(true);
    let mut pager = Pager::new(options, 8).expect("valid options");
    pager.set_viewport(Viewport {
        main: 1080.0,
        cross: 1920.0,
    });

    let mut host = PrintHost;
    pager.layout(&mut host);

    // Drag half an interval to the right (distance ratio 10, interval 30).
    let consumed = pager.scroll_by(150.0);
    println!(
        "consumed={consumed} offset={} current={}",
        pager.offset(),
        pager.current_position()
    );
    pager.layout(&mut host);
    println!("offset_to_center={}", pager.offset_to_center());
}
