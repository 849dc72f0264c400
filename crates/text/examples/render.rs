use decorate_core::{decorate, ObjectRef};
use decorate_text::{Bold, Italic, Text};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let text = match decorate::<Bold>(ObjectRef::new(Text::new("Hello World"))).and_then(decorate::<Italic>) {
        Ok(text) => text,
        Err(e) => {
            error!(cause = %e, "decorate text error");
            return;
        }
    };

    // decorated method, then the original ones
    for method in ["draw", "dump", "clear", "dump", "draw"] {
        match text.invoke(method, vec![]) {
            Ok(output) => {
                info!(method, "called");
                println!("{output}");
            }
            Err(e) => error!(method, cause = %e, "call error"),
        }
    }

    println!("decorated object:\n{text:#?}");
}
