//! Table and procedure requests against the hosted backend.

use ready_core::backend::{ProcedureArgs, StockBackend};
use ready_core::entities::{Item, Profile, Transaction};
use ready_core::errors::BackendError;
use ready_core::history::{HistoryPage, HistoryQuery};
use ready_core::inputs::{ItemPatch, NewItem, NewTransaction};
use serde::de::DeserializeOwned;

use crate::RestBackend;
use crate::error::RemoteError;
use crate::http::{check_response, content_range_total};
use crate::rows::TransactionRow;

const RETURN_REPRESENTATION: &str = "return=representation";

/// Query string of a history page, without the `Range` header.
pub(crate) fn history_query_string(query: &HistoryQuery) -> String {
    let mut params = String::from("select=*,items(name)&order=created_at.desc,id.desc");
    if let Some(action) = query.filter {
        params.push_str("&action_type=eq.");
        params.push_str(&urlencoding::encode(action.as_str()));
    }
    params
}

async fn first_row<T: DeserializeOwned>(
    resp: reqwest::Response,
    entity: &'static str,
    id: String,
) -> Result<T, BackendError> {
    let rows: Vec<T> = resp.json().await.map_err(RemoteError::from)?;
    rows.into_iter()
        .next()
        .ok_or(BackendError::NotFound { entity, id })
}

impl RestBackend {
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, RemoteError> {
        let url = self.table_url(
            "profiles",
            &format!("select=id,email,role&id=eq.{}", urlencoding::encode(user_id)),
        );
        let resp = check_response(self.authed(self.http.get(&url)).send().await?).await?;
        let rows: Vec<Profile> = resp.json().await?;
        Ok(rows.into_iter().next())
    }

    /// Fetch one history page with an exact total count.
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<HistoryPage, RemoteError> {
        let (from, to) = query.range();
        let url = self.table_url("transactions", &history_query_string(query));
        let resp = self
            .authed(self.http.get(&url))
            .header("Range-Unit", "items")
            .header(reqwest::header::RANGE, format!("{from}-{to}"))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        // Past the last row the backend answers 416 and still reports the total.
        if resp.status() == reqwest::StatusCode::RANGE_NOT_SATISFIABLE {
            let mut page = HistoryPage::empty(query);
            page.total = content_range_total(&resp).unwrap_or(0);
            return Ok(page);
        }

        let resp = check_response(resp).await?;
        let total = content_range_total(&resp)?;
        let rows: Vec<TransactionRow> = resp.json().await?;
        tracing::debug!(page = query.page, rows = rows.len(), total, "fetched history page");
        Ok(HistoryPage {
            rows: rows.into_iter().map(Into::into).collect(),
            total,
            page: query.page,
            page_size: query.page_size,
        })
    }
}

impl StockBackend for RestBackend {
    async fn call_procedure(&self, name: &str, args: &ProcedureArgs) -> Result<(), BackendError> {
        tracing::debug!(procedure = name, item_id = args.t_item_id, "calling remote procedure");
        let resp = self
            .authed(self.http.post(self.rpc_url(name)))
            .json(args)
            .send()
            .await
            .map_err(|e| RemoteError::from(e).into_procedure_error(name))?;
        check_response(resp)
            .await
            .map_err(|e| e.into_procedure_error(name))?;
        Ok(())
    }

    async fn fetch_item(&self, id: i64) -> Result<Item, BackendError> {
        let url = self.table_url("items", &format!("select=*&id=eq.{id}"));
        let resp = check_response(
            self.authed(self.http.get(&url))
                .send()
                .await
                .map_err(RemoteError::from)?,
        )
        .await?;
        first_row(resp, "item", id.to_string()).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, BackendError> {
        let url = self.table_url("items", "select=*&is_deleted=eq.false&order=name.asc,id.asc");
        let resp = check_response(
            self.authed(self.http.get(&url))
                .send()
                .await
                .map_err(RemoteError::from)?,
        )
        .await?;
        Ok(resp.json().await.map_err(RemoteError::from)?)
    }

    async fn insert_item(&self, item: &NewItem) -> Result<Item, BackendError> {
        let url = self.table_url("items", "");
        let resp = check_response(
            self.authed(self.http.post(&url))
                .header("Prefer", RETURN_REPRESENTATION)
                .json(item)
                .send()
                .await
                .map_err(RemoteError::from)?,
        )
        .await?;
        first_row(resp, "item", item.name.clone()).await
    }

    async fn update_item(&self, id: i64, patch: &ItemPatch) -> Result<Item, BackendError> {
        if patch.is_empty() {
            return self.fetch_item(id).await;
        }
        let url = self.table_url("items", &format!("id=eq.{id}"));
        let resp = check_response(
            self.authed(self.http.patch(&url))
                .header("Prefer", RETURN_REPRESENTATION)
                .json(patch)
                .send()
                .await
                .map_err(RemoteError::from)?,
        )
        .await?;
        first_row(resp, "item", id.to_string()).await
    }

    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, BackendError> {
        let url = self.table_url("transactions", "");
        let resp = check_response(
            self.authed(self.http.post(&url))
                .header("Prefer", RETURN_REPRESENTATION)
                .json(tx)
                .send()
                .await
                .map_err(RemoteError::from)?,
        )
        .await?;
        first_row(resp, "transaction", tx.action_type.to_string()).await
    }

    async fn query_transactions(&self, query: &HistoryQuery) -> Result<HistoryPage, BackendError> {
        query
            .validate()
            .map_err(|e| BackendError::Rejected {
                status: 400,
                message: e.to_string(),
            })?;
        Ok(self.get_history(query).await?)
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        Ok(self.get_profile(user_id).await?)
    }
}
