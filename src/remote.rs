//! 同期先リモートのクライアント
//!
//! `GET <endpoint>` で投稿一覧を取得し、`POST <endpoint>` で名言を1件送信する。

use crate::config::HttpConfig;
use crate::error::{QbError, Result};
use crate::quote::Quote;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// リモートの投稿（`title` 以外は使わない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePost {
    pub title: String,
}

impl From<&Value> for RemotePost {
    /// 要素の形は検証しない
    ///
    /// `title` が無い・null なら空文字列、文字列以外は JSON 表記をそのまま使う。
    fn from(value: &Value) -> Self {
        let title = match value.get("title") {
            Some(Value::String(title)) => title.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };
        Self { title }
    }
}

/// リモートクライアント trait
pub trait RemoteClient: Send + Sync {
    /// 投稿一覧を取得
    fn fetch_posts<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RemotePost>>> + Send + 'a>>;

    /// 名言を1件送信し、レスポンスボディを返す
    fn post_quote<'a>(
        &'a self,
        quote: &'a Quote,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;
}

/// reqwest によるリモートクライアント
pub struct HttpRemote {
    http: Client,
    endpoint: String,
}

impl HttpRemote {
    pub fn new(config: &HttpConfig, endpoint: impl Into<String>) -> Self {
        Self {
            http: config.build_client(),
            endpoint: endpoint.into(),
        }
    }
}

/// 成功以外のステータスをエラーに変換
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status().as_u16();
    if !response.status().is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(QbError::RemoteApi { status, message });
    }
    Ok(response)
}

impl RemoteClient for HttpRemote {
    fn fetch_posts<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RemotePost>>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.http.get(&self.endpoint).send().await?;
            let response = check_status(response).await?;
            // 配列であることだけを要求し、各要素は寛容に読む
            let items = response.json::<Vec<Value>>().await?;
            Ok(items.iter().map(RemotePost::from).collect())
        })
    }

    fn post_quote<'a>(
        &'a self,
        quote: &'a Quote,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            let response = self.http.post(&self.endpoint).json(quote).send().await?;
            let response = check_status(response).await?;
            Ok(response.json::<Value>().await?)
        })
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub mod stub;

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
