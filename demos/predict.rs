use rpredict::{
    HistoryItem, InputMode, ModelConfig, PredictionClient, PredictionPayload,
};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    rpredict::logger::init_with_config(
        rpredict::logger::LoggerConfig::development()
            .with_level(rpredict::logger::LogLevel::Debug),
    )?;

    let config = ModelConfig::from_env();
    log::info!("🔍 Endpoint: {}", config.endpoint_url);
    log::info!("⚙️  Model: {} (threshold {})", config.model_name, config.threshold);

    let client = PredictionClient::new();
    let mut history: Vec<HistoryItem> = Vec::new();

    log::info!("🩺 Checking endpoint health...");
    match client.health_check(&config).await {
        Ok(true) => log::info!("✅ Endpoint is healthy"),
        Ok(false) => log::warn!("⚠️  Endpoint reachable but reported unhealthy"),
        Err(e) => {
            log::error!("❌ Endpoint unreachable: {}", e);
            return Err(e.into());
        }
    }

    // Test 1: text prediction
    log::info!("🔄 Testing text prediction...");
    let text = "I can't believe how well this turned out!";
    let timer = rpredict::logger::timer("text prediction");
    match client
        .predict(InputMode::Text, PredictionPayload::text(text), &config)
        .await
    {
        Ok(result) => {
            log::info!("✅ Label: {} (confidence {:.2})", result.label, result.confidence);
            log::info!("📊 Round trip: {}ms", result.processing_time_ms);
            history.push(HistoryItem::new(InputMode::Text, text, result));
        }
        Err(e) => {
            log::error!("❌ Text prediction failed: {}", e);
            log::warn!("💡 Check that the backend routes mode=TEXT");
        }
    }
    timer.stop();

    // Test 2: image prediction, if a sample file is around
    log::info!("🖼️  Testing image prediction...");
    match fs::read("sample.png") {
        Ok(bytes) => {
            let payload = PredictionPayload::file_with_mime(bytes, "sample.png", "image/png");
            match client.predict(InputMode::Image, payload, &config).await {
                Ok(result) => {
                    log::info!(
                        "✅ Label: {} (confidence {:.2})",
                        result.label,
                        result.confidence
                    );
                    if !result.data.is_null() {
                        log::debug!("📦 Full response: {}", result.data);
                    }
                    history.push(HistoryItem::new(InputMode::Image, "sample.png", result));
                }
                Err(e) => log::error!("❌ Image prediction failed: {}", e),
            }
        }
        Err(_) => log::warn!("⚠️  No sample.png in the working directory, skipping"),
    }

    log::info!("🎉 Done, {} prediction(s) recorded:", history.len());
    for item in &history {
        log::info!(
            "   [{}] {} -> {} ({})",
            item.mode,
            item.preview,
            item.result.label,
            item.id
        );
    }

    Ok(())
}
