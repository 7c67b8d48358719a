use futures_util::future::join_all;
use serde::Serialize;

use callflow::runtime::boot;
use callflow::service::{Analysis, ErrorBody};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let numbers: Vec<String> = std::env::args().skip(1).collect();
    if numbers.is_empty() {
        eprintln!("usage: callflow <phone-number>...");
        std::process::exit(2);
    }

    boot::init_logging();
    let (service, _config) = boot::boot()?;

    let results = join_all(numbers.iter().map(|number| service.analyze(number))).await;

    for result in results {
        let rendered = match result {
            Ok(Analysis::Found(flow)) => to_json(&flow)?,
            Ok(Analysis::NotFound) => to_json(&ErrorBody::not_found())?,
            Err(e) => to_json(&ErrorBody::from(&e))?,
        };
        println!("{}", rendered);
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
