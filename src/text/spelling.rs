//! Spelling equivalences from section 8 of the SPDX matching guidelines.
//!
//! Several entries are misspellings on purpose; they are the variants that
//! show up in real license texts.

/// Ordered `(source, canonical)` replacements.
///
/// Every literal occurrence of `source` is replaced, including occurrences
/// inside longer words. Entries are applied in table order, so an entry can
/// only see text produced by the entries before it.
pub static SPELLING_EQUIVALENTS: &[(&str, &str)] = &[
    ("acknowledgement", "acknowledgment"),
    ("analog", "analogue"),
    ("analyze", "analyse"),
    ("artifact", "artefact"),
    ("authorization", "authorisation"),
    ("authorized", "authorised"),
    ("caliber", "calibre"),
    ("canceled", "cancelled"),
    ("capitalizations", "capitalisations"),
    ("catalog", "catalogue"),
    ("categorize", "categorise"),
    ("center", "centre"),
    ("copyright holder", "copyright owner"),
    ("emphasized", "emphasised"),
    ("favor", "favour"),
    ("favorite", "favourite"),
    ("fulfill", "fulfil"),
    ("fulfillment", "fulfilment"),
    ("initialize", "initialise"),
    ("judgement", "judgment"),
    ("labeling", "labelling"),
    ("labor", "labour"),
    ("licence", "license"),
    ("maximize", "maximise"),
    ("modeled", "modelled"),
    ("modeling", "modelling"),
    ("noncommercial", "non-commercial"),
    ("offense", "offence"),
    ("optimize", "optimise"),
    ("organization", "organisation"),
    ("organize", "organise"),
    ("percent", "per cent"),
    ("practice", "practise"),
    ("program", "programme"),
    ("realize", "realise"),
    ("recognize", "recognise"),
    ("signaling", "signalling"),
    ("sub-license", "sublicense"),
    ("sub license", "sublicense"),
    ("utilization", "utilisation"),
    ("while", "whilst"),
    ("wilfull", "wilful"),
];

/// Apply every entry of [`SPELLING_EQUIVALENTS`] in order.
#[must_use]
pub fn apply_spelling_equivalents(text: &str) -> String {
    SPELLING_EQUIVALENTS
        .iter()
        .fold(text.to_string(), |acc, (source, canonical)| {
            if acc.contains(source) {
                acc.replace(source, canonical)
            } else {
                acc
            }
        })
}
