// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer discovery review and adoption.
//
// Review: list not-yet-registered printers that have polled the server and
// open a table dialog over them. Adoption: register one of them under an
// operator-supplied label, then reload the hosting record so the new
// printer becomes visible.

use tracing::{error, info};

use bondruck_core::error::{BondruckError, Result};
use bondruck_core::i18n::{text, Lang, Msg};
use bondruck_core::types::{AdoptionRequest, MacAddress};
use bondruck_rpc::{CloudprntRpc, RpcOutcome};

use crate::ui::{Notice, ReviewTable, UiAction, UiSink};

/// How long the adoption success alert stays up, in seconds.
const ADOPTED_ALERT_SECONDS: u8 = 3;

/// Fetch the discovered printers and present them for review.
///
/// Every terminal state surfaces exactly one UI action: a blocking error
/// notice, an informational "nothing new" notice, or the review table.
pub async fn review_discovered_printers(
    rpc: &dyn CloudprntRpc,
    lang: Lang,
    ui: &mut dyn UiSink,
) {
    match rpc.list_discovered_printers().await {
        Ok(RpcOutcome::Ok(printers)) if printers.is_empty() => {
            ui.push(UiAction::Info(Notice::info(
                text(lang, Msg::NoNewPrintersTitle),
                text(lang, Msg::NoNewPrintersBody),
            )));
        }
        Ok(RpcOutcome::Ok(printers)) => {
            info!(count = printers.len(), "discovered printers fetched");
            ui.push(UiAction::OpenReviewTable(ReviewTable::new(lang, &printers)));
        }
        Ok(RpcOutcome::Err { message }) => {
            let fallback = text(lang, Msg::ListPrintersFallback);
            ui.push(UiAction::MsgPrint(Notice::error(
                text(lang, Msg::ErrorTitle),
                message.as_deref().unwrap_or(fallback),
            )));
        }
        Err(e) => {
            error!(error = %e, "listing discovered printers failed");
            ui.push(UiAction::MsgPrint(Notice::error(
                text(lang, Msg::ErrorTitle),
                text(lang, Msg::ListPrintersFallback),
            )));
        }
    }
}

/// Adopt a discovered printer under the given label.
///
/// The label is required; an empty one is rejected before any remote call
/// is made. The request carries exactly the MAC address shown in the
/// adopted row. On success: one transient notice, close the prompt, one
/// reload of the hosting record. On failure: one blocking error notice and
/// no reload.
pub async fn adopt_printer(
    rpc: &dyn CloudprntRpc,
    lang: Lang,
    mac_address: &MacAddress,
    label: &str,
    ui: &mut dyn UiSink,
) -> Result<()> {
    let label = label.trim();
    if label.is_empty() {
        return Err(BondruckError::LabelRequired);
    }

    let request = AdoptionRequest {
        mac_address: mac_address.clone(),
        label: label.to_owned(),
    };

    match rpc.adopt_printer(&request).await {
        Ok(RpcOutcome::Ok(())) => {
            info!(mac = %request.mac_address, label, "printer adopted");
            ui.push(UiAction::Alert {
                notice: Notice::success(text(lang, Msg::PrinterAdded)),
                seconds: ADOPTED_ALERT_SECONDS,
            });
            ui.push(UiAction::CloseDialog);
            ui.push(UiAction::ReloadRecord);
        }
        Ok(RpcOutcome::Err { message }) => {
            let fallback = text(lang, Msg::AdoptFallback);
            ui.push(UiAction::MsgPrint(Notice::error(
                text(lang, Msg::ErrorTitle),
                message.as_deref().unwrap_or(fallback),
            )));
        }
        Err(e) => {
            error!(error = %e, mac = %request.mac_address, "printer adoption failed");
            ui.push(UiAction::MsgPrint(Notice::error(
                text(lang, Msg::ErrorTitle),
                text(lang, Msg::AdoptFallback),
            )));
        }
    }
    Ok(())
}
