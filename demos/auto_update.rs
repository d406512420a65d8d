//! Walks an in-memory document tree and rewrites its marker-bearing text
//! leaves in place.
//!
//! Run with: `cargo run --example auto_update`

use stamp::{CustomData, DEFAULT_SELECTOR, Engine, VecTree, auto_update};

fn main() {
    env_logger::init();

    let mut tree = VecTree::new();
    let body = tree.add_element(tree.root(), "body");
    let header = tree.add_element(body, "header");
    let title = tree.add_text(header, "{{site}} — since {{founded}}");
    let main = tree.add_element(body, "main");
    let age = tree.add_text(main, "That's {{years_since:1998}} years of stamping.");
    let footer = tree.add_element(body, "footer");
    let copyright = tree.add_text(footer, "© {{current_year}} {{site}}");

    let mut data = CustomData::new();
    data.insert("site", "Stamp Works");
    data.insert("founded", 1998);

    let engine = Engine::new();
    auto_update(Some(&mut tree), DEFAULT_SELECTOR, &data, &engine);

    for node in [title, age, copyright] {
        if let Some(text) = tree.text_of(node) {
            println!("{}", text);
        }
    }
}
