//! Registers a couple of custom markers and processes a template with them.
//!
//! Run with: `cargo run --example custom_markers`

use stamp::{CustomData, Engine, MarkerError};

fn main() {
    env_logger::init();

    let mut engine = Engine::new();

    engine.register_marker("shout", |params: &[String]| {
        let text = params.first().cloned().unwrap_or_default();
        Ok(format!("{}!", text.to_uppercase()))
    });

    engine.register_marker("repeat", |params: &[String]| {
        if params.len() != 2 {
            return Err(MarkerError::Arity {
                marker: "repeat".to_string(),
                expected: 2,
                got: params.len(),
            });
        }
        let count: usize = params[1]
            .parse()
            .map_err(|_| MarkerError::invocation("repeat", "count is not a number"))?;
        Ok(params[0].repeat(count))
    });

    println!("registry holds {} markers\n", engine.registry().len());

    let mut data = CustomData::new();
    data.insert("product", "stamp");

    let template = "\
{{shout:welcome}} You are using {{product}} in {{current_year}}.
Separator: {{repeat:-=,10}}
Dice roll: {{random:1,6}} | Sum: {{add:10,20,12}}
This marker fails and stays put: {{repeat:oops}}";

    println!("{}", engine.process(template, &data));
}
