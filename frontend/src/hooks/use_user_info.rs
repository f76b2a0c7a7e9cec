use yew::prelude::*;
use shared::UserInfo;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct UserInfoState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

/// Load the signed-in user once on mount
#[hook]
pub fn use_user_info(api_client: &ApiClient) -> UserInfoState {
    let user = use_state(|| Option::<UserInfo>::None);
    let loading = use_state(|| true);

    use_effect_with(api_client.clone(), {
        let user = user.clone();
        let loading = loading.clone();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.get_user_info().await {
                    Ok(info) => {
                        Logger::debug_with_component("use_user_info", &format!("Signed in as {}", info.login_name));
                        user.set(Some(info));
                    }
                    Err(e) => {
                        Logger::error_with_component("use_user_info", &format!("Failed to load user info: {}", e));
                    }
                }
                loading.set(false);
            });
            || ()
        }
    });

    UserInfoState { user: (*user).clone(), loading: *loading }
}
