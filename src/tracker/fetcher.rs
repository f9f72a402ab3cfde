use tracing::{debug, info};

use crate::error::Result;
use crate::exchange::MarketDataSource;
use crate::models::Fill;

/// Page through the whole fill history, following cursors until the source
/// returns an empty page or no cursor. A failed page aborts the fetch.
pub async fn fetch_all_fills(
    source: &mut dyn MarketDataSource,
    page_size: usize,
) -> Result<Vec<Fill>> {
    let mut all_fills: Vec<Fill> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut page_num = 1;
    let mut skipped = 0;

    loop {
        debug!("  Page {}...", page_num);
        let page = source.list_fills(cursor.as_deref(), page_size).await?;
        if page.is_exhausted() {
            break;
        }

        skipped += page.skipped;
        all_fills.extend(page.fills);

        match page.cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
        page_num += 1;
    }

    if skipped > 0 {
        info!("Skipped {} undecodable fills", skipped);
    }
    info!("Found {} trades", all_fills.len());
    Ok(all_fills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::exchange::{FillPage, ReplaySource};
    use crate::models::{MarketState, Side};
    use async_trait::async_trait;
    use std::collections::HashMap;

    fn fills(n: usize) -> Vec<Fill> {
        (0..n)
            .map(|i| Fill {
                ticker: format!("KXNFLGAME-{}", i),
                side: Side::Yes,
                count: 1,
                price: 0.5,
                created_time: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn follows_cursors_to_the_end() {
        let mut src = ReplaySource::new(fills(7), HashMap::new());
        let all = fetch_all_fills(&mut src, 3).await.unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].ticker, "KXNFLGAME-0");
        assert_eq!(all[6].ticker, "KXNFLGAME-6");
    }

    #[tokio::test]
    async fn empty_history() {
        let mut src = ReplaySource::new(Vec::new(), HashMap::new());
        assert!(fetch_all_fills(&mut src, 100).await.unwrap().is_empty());
    }

    /// Serves scripted pages; errors once the script runs out.
    struct ScriptedSource {
        pages: Vec<FillPage>,
        calls: usize,
    }

    #[async_trait]
    impl MarketDataSource for ScriptedSource {
        async fn list_fills(&mut self, _cursor: Option<&str>, _limit: usize) -> Result<FillPage> {
            self.calls += 1;
            if self.pages.is_empty() {
                return Err(TrackerError::Api {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(self.pages.remove(0))
        }

        async fn get_market(&mut self, _ticker: &str) -> Result<MarketState> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn stops_on_empty_page_even_with_cursor() {
        let mut src = ScriptedSource {
            pages: vec![
                FillPage {
                    fills: fills(2),
                    skipped: 0,
                    cursor: Some("next".to_string()),
                },
                FillPage {
                    fills: Vec::new(),
                    skipped: 0,
                    cursor: Some("again".to_string()),
                },
            ],
            calls: 0,
        };
        let all = fetch_all_fills(&mut src, 2).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(src.calls, 2);
    }

    #[tokio::test]
    async fn page_of_only_bad_fills_keeps_paging() {
        let mut src = ScriptedSource {
            pages: vec![
                FillPage {
                    fills: Vec::new(),
                    skipped: 3,
                    cursor: Some("next".to_string()),
                },
                FillPage {
                    fills: fills(1),
                    skipped: 0,
                    cursor: None,
                },
            ],
            calls: 0,
        };
        let all = fetch_all_fills(&mut src, 3).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn page_failure_is_fatal() {
        let mut src = ScriptedSource {
            pages: vec![FillPage {
                fills: fills(2),
                skipped: 0,
                cursor: Some("next".to_string()),
            }],
            calls: 0,
        };
        let err = fetch_all_fills(&mut src, 2).await.unwrap_err();
        assert!(matches!(err, TrackerError::Api { status: 500, .. }));
    }
}
