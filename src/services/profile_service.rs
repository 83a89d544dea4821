use crate::error::ClientError;
use crate::services::api_client::ApiClient;

/// Tarjeta de perfil renderizada por el servidor (fragmento HTML)
pub async fn fetch_profile_card(client: &ApiClient, url: &str) -> Result<String, ClientError> {
    client.get_text(url).await
}
