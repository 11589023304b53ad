//! Server-rendered sample front-end. Every page reads the same public views
//! the JSON API returns, so nothing private can reach the HTML.

use askama::Template;
use rb_core::models::{ThreadDetail, ThreadSummary};

pub use askama::Error as RenderError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate<'a> {
    pub board: &'a str,
    pub threads: &'a [ThreadSummary],
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "thread.html")]
pub struct ThreadTemplate<'a> {
    pub board: &'a str,
    pub thread: &'a ThreadDetail,
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rb_core::models::ReplyView;
    use uuid::Uuid;

    fn summary(text: &str) -> ThreadSummary {
        ThreadSummary {
            id: Uuid::now_v7(),
            text: text.to_string(),
            created_on: Utc::now(),
            bumped_on: Utc::now(),
            replies: vec![ReplyView {
                id: Uuid::now_v7(),
                text: "a reply".to_string(),
                created_on: Utc::now(),
            }],
            replycount: 7,
        }
    }

    #[test]
    fn board_page_escapes_post_text() {
        let threads = vec![summary("<script>alert(1)</script>")];
        let html = BoardTemplate { board: "test", threads: &threads, title: "/test/" }
            .render()
            .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("7 replies"));
        assert!(html.contains("a reply"));
    }

    #[test]
    fn empty_board_says_so() {
        let html = BoardTemplate { board: "test", threads: &[], title: "/test/" }
            .render()
            .unwrap();

        assert!(html.contains("No threads yet."));
    }

    #[test]
    fn thread_page_lists_every_reply() {
        let thread = ThreadDetail {
            id: Uuid::now_v7(),
            text: "op".to_string(),
            created_on: Utc::now(),
            bumped_on: Utc::now(),
            replies: (0..5)
                .map(|i| ReplyView {
                    id: Uuid::now_v7(),
                    text: format!("reply number {i}"),
                    created_on: Utc::now(),
                })
                .collect(),
        };

        let html = ThreadTemplate { board: "test", thread: &thread, title: "thread" }
            .render()
            .unwrap();

        for i in 0..5 {
            assert!(html.contains(&format!("reply number {i}")));
        }
        assert!(html.contains(&thread.id.to_string()));
    }
}
