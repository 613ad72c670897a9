// src/collect/browser.rs
//
// The only DOM surface the collector needs, so the page loop can run
// against a real browser or an in-memory fake.
#![allow(async_fn_in_trait)]

use thirtyfour::prelude::*;

use crate::config::{consts::USER_AGENT, options::CollectOptions};
use crate::core::sanitize::non_empty;
use crate::error::Result;

pub trait Browser {
    type Card: Card;

    async fn goto(&self, url: &str) -> Result<()>;

    /// Scroll by one document height to trigger lazy loading.
    async fn scroll_to_bottom(&self) -> Result<()>;

    /// Number of elements currently matching `css`.
    async fn count(&self, css: &str) -> Result<usize>;

    async fn cards(&self, css: &str) -> Result<Vec<Self::Card>>;

    /// End the session. Called exactly once, whatever way the run ended.
    async fn quit(self) -> Result<()>
    where
        Self: Sized;
}

/// One listing element. Lookups that match nothing yield `Ok(None)`.
pub trait Card {
    /// Text of the first descendant matching `css`, whitespace-normalised.
    async fn text(&self, css: &str) -> Result<Option<String>>;

    /// Property/attribute `name` of the first descendant matching `css`.
    async fn attribute(&self, css: &str, name: &str) -> Result<Option<String>>;
}

/* ---------------- thirtyfour ---------------- */

/// A Chrome session behind a WebDriver server (chromedriver).
pub struct ChromeSession {
    driver: WebDriver,
}

impl ChromeSession {
    pub async fn launch(opts: &CollectOptions) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if opts.headless {
            caps.add_arg("--headless")?;
            caps.add_arg("--disable-gpu")?;
        }
        caps.add_arg("start-maximized")?;
        caps.add_arg("--no-sandbox")?;
        caps.add_arg(&format!("user-agent={USER_AGENT}"))?;

        let driver = WebDriver::new(opts.webdriver_url.as_str(), caps).await?;
        log::info!("Browser: session started ({})", opts.webdriver_url);
        Ok(Self { driver })
    }
}

impl Browser for ChromeSession {
    type Card = WebElement;

    async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.driver
            .execute("window.scrollBy(0, document.body.scrollHeight);", Vec::new())
            .await?;
        Ok(())
    }

    async fn count(&self, css: &str) -> Result<usize> {
        Ok(self.driver.find_all(By::Css(css)).await?.len())
    }

    async fn cards(&self, css: &str) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(By::Css(css)).await?)
    }

    async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        log::info!("Browser: session closed");
        Ok(())
    }
}

impl Card for WebElement {
    async fn text(&self, css: &str) -> Result<Option<String>> {
        let found = self.find_all(By::Css(css)).await?;
        match found.first() {
            Some(el) => Ok(non_empty(&el.text().await?)),
            None => Ok(None),
        }
    }

    async fn attribute(&self, css: &str, name: &str) -> Result<Option<String>> {
        let found = self.find_all(By::Css(css)).await?;
        match found.first() {
            // Property first: resolves relative src/href like the browser does.
            Some(el) => match el.prop(name).await? {
                Some(v) => Ok(non_empty(&v)),
                None => Ok(el.attr(name).await?.as_deref().and_then(non_empty)),
            },
            None => Ok(None),
        }
    }
}
