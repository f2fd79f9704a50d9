// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Static message catalogue for operator-facing text.
//
// The deployed POS runs in French; English is kept for development and as
// the template for further languages. Every string an operator can see goes
// through `text` so no flow hard-codes a locale.

use serde::{Deserialize, Serialize};

/// Language for operator-facing notices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    Fr,
    En,
}

/// Keys for every operator-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    // Settings view buttons
    DiscoverPrintersButton,
    TestPrinterButton,
    // Discovery review
    NoNewPrintersTitle,
    NoNewPrintersBody,
    DiscoveredPrintersTitle,
    Close,
    ErrorTitle,
    ListPrintersFallback,
    // Adoption
    AdoptPrinterTitle,
    AdoptAction,
    PrinterNameLabel,
    PrinterAdded,
    AdoptFallback,
    // Test print
    TestPrintTitle,
    PrinterFieldLabel,
    TestTextLabel,
    TestPrintDefaultText,
    PrintAction,
    TestPrintSent,
    ErrorPrefix,
    UnknownError,
    // Invoice receipt
    ReceiptButton,
    ReceiptButtonGroup,
    ReceiptSent,
}

/// Look up a message in the given language.
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    match lang {
        Lang::Fr => french(msg),
        Lang::En => english(msg),
    }
}

fn french(msg: Msg) -> &'static str {
    match msg {
        Msg::DiscoverPrintersButton => "Découvrir Imprimantes",
        Msg::TestPrinterButton => "Tester Imprimante",
        Msg::NoNewPrintersTitle => "Aucune nouvelle imprimante",
        Msg::NoNewPrintersBody => {
            "Aucune nouvelle imprimante détectée. Assurez-vous que l'imprimante poll le serveur avec l'URL correcte."
        }
        Msg::DiscoveredPrintersTitle => "Imprimantes Découvertes",
        Msg::Close => "Fermer",
        Msg::ErrorTitle => "Erreur",
        Msg::ListPrintersFallback => "Erreur lors de la récupération des imprimantes",
        Msg::AdoptPrinterTitle => "Ajouter Imprimante",
        Msg::AdoptAction => "Ajouter",
        Msg::PrinterNameLabel => "Nom de l'imprimante",
        Msg::PrinterAdded => "Imprimante ajoutée avec succès!",
        Msg::AdoptFallback => "Erreur lors de l'ajout",
        Msg::TestPrintTitle => "Test d'impression",
        Msg::PrinterFieldLabel => "Imprimante",
        Msg::TestTextLabel => "Texte à imprimer",
        Msg::TestPrintDefaultText => "Ceci est un test d'impression CloudPRNT",
        Msg::PrintAction => "Imprimer",
        Msg::TestPrintSent => "Test d'impression envoyé à l'imprimante",
        Msg::ErrorPrefix => "Erreur: ",
        Msg::UnknownError => "Erreur inconnue",
        Msg::ReceiptButton => "Ticket Thermique",
        Msg::ReceiptButtonGroup => "Imprimer",
        Msg::ReceiptSent => "Ticket envoyé à l'imprimante",
    }
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::DiscoverPrintersButton => "Discover Printers",
        Msg::TestPrinterButton => "Test Printer",
        Msg::NoNewPrintersTitle => "No new printers",
        Msg::NoNewPrintersBody => {
            "No new printer detected. Make sure the printer polls the server with the correct URL."
        }
        Msg::DiscoveredPrintersTitle => "Discovered Printers",
        Msg::Close => "Close",
        Msg::ErrorTitle => "Error",
        Msg::ListPrintersFallback => "Failed to fetch discovered printers",
        Msg::AdoptPrinterTitle => "Add Printer",
        Msg::AdoptAction => "Add",
        Msg::PrinterNameLabel => "Printer name",
        Msg::PrinterAdded => "Printer added successfully!",
        Msg::AdoptFallback => "Failed to add the printer",
        Msg::TestPrintTitle => "Test print",
        Msg::PrinterFieldLabel => "Printer",
        Msg::TestTextLabel => "Text to print",
        Msg::TestPrintDefaultText => "This is a CloudPRNT test print",
        Msg::PrintAction => "Print",
        Msg::TestPrintSent => "Test print sent to the printer",
        Msg::ErrorPrefix => "Error: ",
        Msg::UnknownError => "Unknown error",
        Msg::ReceiptButton => "Thermal Receipt",
        Msg::ReceiptButtonGroup => "Print",
        Msg::ReceiptSent => "Receipt sent to the printer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_french() {
        assert_eq!(Lang::default(), Lang::Fr);
        assert_eq!(
            text(Lang::default(), Msg::PrinterAdded),
            "Imprimante ajoutée avec succès!"
        );
    }

    #[test]
    fn english_catalogue_is_distinct() {
        assert_ne!(
            text(Lang::Fr, Msg::TestPrintSent),
            text(Lang::En, Msg::TestPrintSent)
        );
    }
}
