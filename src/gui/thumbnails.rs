// src/gui/thumbnails.rs
//
// Best-effort thumbnail loader for the deals list. Each URL is fetched at
// most once per session; failures are remembered so a dead host only
// costs one timeout.

use std::{collections::HashMap, time::Duration};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use reqwest::blocking::Client;

use crate::{config::consts::USER_AGENT, error::Result};

pub struct ThumbnailCache {
    client: Option<Client>,
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ThumbnailCache {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| log::warn!("Thumbnails disabled: {}", e))
            .ok();
        Self { client, textures: HashMap::new() }
    }

    /// Texture for `url`, fetching it on first use. `None` means the
    /// placeholder should be shown.
    pub fn get(&mut self, ctx: &egui::Context, url: &str) -> Option<&TextureHandle> {
        if !self.textures.contains_key(url) {
            let tex = self.load(ctx, url);
            self.textures.insert(s!(url), tex);
        }
        self.textures.get(url).and_then(Option::as_ref)
    }

    fn load(&self, ctx: &egui::Context, url: &str) -> Option<TextureHandle> {
        let client = self.client.as_ref()?;
        match fetch(client, url).and_then(|bytes| decode(&bytes)) {
            Ok(image) => Some(ctx.load_texture(url, image, TextureOptions::LINEAR)),
            Err(e) => {
                log::debug!("Thumbnail {}: {}", url, e);
                None
            }
        }
    }
}

fn fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.bytes()?.to_vec())
}

/// Decode JPEG/PNG/WebP bytes into an egui image.
pub fn decode(bytes: &[u8]) -> Result<ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
