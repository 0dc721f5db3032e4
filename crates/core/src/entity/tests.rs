// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use test_log::test;

use super::*;

#[test]
fn empty_or_blank_id_is_rejected() {
    assert!(MovieId::new("").is_none());
    assert!(MovieId::new("  ").is_none());
}

#[test]
fn id_is_kept_verbatim() {
    let id = MovieId::new("6f1a-b2").unwrap();
    assert_eq!("6f1a-b2", id.as_str());
    assert_eq!("6f1a-b2", id.to_string());
}

#[test]
fn numeric_id_is_kept_as_decimal_text() {
    assert_eq!("42", MovieId::from(42).as_str());
}
