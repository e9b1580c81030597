use country_sampler::{render, AppState, CountriesClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let count = std::env::args().nth(1).unwrap_or_else(|| "5".to_owned());

    let client = CountriesClient::new();
    let mut state = AppState::new();
    state.load(&client).await;

    if let Some(error) = state.error() {
        anyhow::bail!("{error}");
    }

    state.input(&count);
    let view = render::view(&state);
    println!("{}", view.status);
    for card in view.cards {
        println!("{card}");
    }

    Ok(())
}
