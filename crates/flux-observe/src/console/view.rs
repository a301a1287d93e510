use super::ConsoleEvent;

/// Text line for a console event.
#[inline]
pub fn render(event: &ConsoleEvent) -> String {
    match event {
        ConsoleEvent::Banner(demo) => format!("=== {} ===", demo.title()),
        ConsoleEvent::Produced(value) => format!("Produced number: {value}"),
        ConsoleEvent::Processed { value, .. } => format!("Processed number: {value}"),
        ConsoleEvent::Note(text) => (*text).to_string(),
        ConsoleEvent::Finished(demo) => demo.completion().to_string(),
    }
}
