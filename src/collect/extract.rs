// src/collect/extract.rs
use super::browser::{Browser, Card};
use crate::config::consts::*;
use crate::error::Result;
use crate::listing::RawListing;

/// Build a raw listing from one card.
///
/// `Ok(None)` for cards without a title and for placeholder/ad cards.
/// Image and link lookups never fail the card; any other lookup error does.
pub async fn extract_card<C: Card>(card: &C) -> Result<Option<RawListing>> {
    let title = match card.text(SEL_TITLE).await? {
        Some(t) if !t.contains(PLACEHOLDER_MARKER) => t,
        _ => return Ok(None),
    };

    let image_url = card.attribute(SEL_IMAGE, "src").await.ok().flatten();
    let product_url = card.attribute(SEL_LINK, "href").await.ok().flatten();

    Ok(Some(RawListing {
        title: Some(title),
        price_now: card.text(SEL_PRICE).await?,
        price_orig: card.text(SEL_PRICE_ORIG).await?,
        discount_pct: card.text(SEL_DISCOUNT).await?,
        shipping: card.text(SEL_SHIPPING).await?,
        rating: card.text(SEL_RATING).await?,
        image_url,
        product_url,
    }))
}

/// Extract every card currently rendered. A failing card is logged and
/// skipped; only the card lookup itself can fail the page.
pub async fn scrape_page<B: Browser>(browser: &B) -> Result<Vec<RawListing>> {
    let cards = browser.cards(SEL_CARD).await?;
    let mut items = Vec::with_capacity(cards.len());

    for (i, card) in cards.iter().enumerate() {
        match extract_card(card).await {
            Ok(Some(listing)) => items.push(listing),
            Ok(None) => {}
            Err(e) => log::warn!("Card {i}: skipped ({e})"),
        }
    }
    Ok(items)
}
