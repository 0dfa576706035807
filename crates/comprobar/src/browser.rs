//! Browser control over the Chrome DevTools Protocol.
//!
//! With the `browser` feature enabled this uses chromiumoxide for real
//! CDP control; without it only [`BrowserConfig`] is available and the
//! mock page in [`crate::driver`] stands in for the browser.

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            chromium_path: None,
        }
    }
}

impl BrowserConfig {
    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }
}

#[cfg(feature = "browser")]
mod cdp {
    use super::BrowserConfig;
    use crate::driver::CalculatorPage;
    use crate::keypad::{Key, DISPLAY_SELECTOR};
    use crate::result::{SuiteError, SuiteResult};
    use async_trait::async_trait;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;

    /// Browser instance with a live CDP connection.
    ///
    /// One browser serves the whole scenario set; each scenario gets
    /// its own page from [`Browser::page`].
    #[derive(Debug)]
    pub struct Browser {
        inner: CdpBrowser,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser instance
        pub async fn launch(config: BrowserConfig) -> SuiteResult<Self> {
            let mut builder = CdpConfig::builder();

            if !config.headless {
                builder = builder.with_head();
            }
            if !config.sandbox {
                builder = builder.no_sandbox();
            }
            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(SuiteError::browser_launch)?;

            let (browser, mut handler) = CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| SuiteError::browser_launch(e.to_string()))?;

            // Drive the CDP event stream until the connection drops
            let handle = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                inner: browser,
                handle,
            })
        }

        /// Open a fresh page for one scenario
        pub async fn page(&self) -> SuiteResult<CalculatorSurface> {
            let page = self
                .inner
                .new_page("about:blank")
                .await
                .map_err(|e| SuiteError::page(e.to_string()))?;
            Ok(CalculatorSurface::new(page))
        }

        /// Close the browser
        pub async fn close(mut self) -> SuiteResult<()> {
            self.inner
                .close()
                .await
                .map_err(|e| SuiteError::browser_launch(e.to_string()))?;
            Ok(())
        }
    }

    /// A calculator page backed by a real CDP page
    #[derive(Debug)]
    pub struct CalculatorSurface {
        inner: CdpPage,
    }

    impl CalculatorSurface {
        pub(crate) fn new(inner: CdpPage) -> Self {
            Self { inner }
        }

        /// Navigate to the application
        pub async fn goto(&mut self, url: &str) -> SuiteResult<()> {
            self.inner
                .goto(url)
                .await
                .map_err(|e| SuiteError::navigation(url, e.to_string()))?;
            Ok(())
        }

        async fn text_of(&self, selector: &str) -> SuiteResult<String> {
            let element = self
                .inner
                .find_element(selector)
                .await
                .map_err(|_| SuiteError::missing_control(selector))?;
            let text = element
                .inner_text()
                .await
                .map_err(|e| SuiteError::page(e.to_string()))?;
            Ok(text.unwrap_or_default())
        }
    }

    #[async_trait]
    impl CalculatorPage for CalculatorSurface {
        async fn press(&mut self, key: Key) -> SuiteResult<()> {
            let element = self
                .inner
                .find_element(key.selector())
                .await
                .map_err(|_| SuiteError::missing_control(key.selector()))?;
            element
                .click()
                .await
                .map_err(|e| SuiteError::input(e.to_string()))?;
            Ok(())
        }

        async fn display(&self) -> SuiteResult<String> {
            self.text_of(DISPLAY_SELECTOR).await
        }

        async fn title(&self) -> SuiteResult<String> {
            let title = self
                .inner
                .evaluate("document.title")
                .await
                .map_err(|e| SuiteError::page(e.to_string()))?
                .into_value::<String>()
                .map_err(|e| SuiteError::page(e.to_string()))?;
            Ok(title)
        }

        async fn close(self) -> SuiteResult<()> {
            self.inner
                .close()
                .await
                .map_err(|e| SuiteError::page(e.to_string()))?;
            Ok(())
        }
    }
}

#[cfg(feature = "browser")]
pub use cdp::{Browser, CalculatorSurface};
