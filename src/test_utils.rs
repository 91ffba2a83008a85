pub fn init() {
    dotenvy::from_filename(".dev.vars").ok();
    env_logger::try_init().ok();
}

pub fn client() -> crate::rest::client::RestClient {
    init();

    let api_key = std::env::var("OBA_API_KEY").unwrap_or_else(|_| "TEST".to_string());
    crate::rest::client::RestClient::new("https://api.pugetsound.onebusaway.org/", &api_key)
        .unwrap()
}
