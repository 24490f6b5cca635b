// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod distribute;
pub mod errors;
pub mod generate;
pub mod http_server;
pub mod image;
pub mod image_search;
pub mod newsletter;
pub mod pages;
pub mod users;

pub use distribute::{distribute_handler, DistributeRequest, DistributeResponse};
pub use errors::{ApiError, ErrorBody};
pub use generate::{generate_handler, GenerateRequest, GenerateResponse};
pub use http_server::{create_app, start_server, AppState, HealthResponse};
pub use image::{generate_image_handler, ImagePayload, ImageRequest, ImageResponse};
pub use image_search::{search_images_handler, ImageSearchParams, ImageSearchResponse};
pub use newsletter::{newsletter_count_handler, subscribe_handler, SubscribeRequest};
pub use pages::{
    create_page_handler, list_pages_handler, list_submissions_handler, public_page_handler,
    publish_page_handler, submit_handler, CreatePageRequest,
};
pub use users::{has_api_key_handler, me_handler, update_settings_handler, UpdateSettingsRequest};
