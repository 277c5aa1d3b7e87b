// SPDX-FileCopyrightText: 2026 The Liana Authors
// SPDX-License-Identifier: MIT

use liana::model::Rect;

pub fn open_pair() -> (Rect, Rect, Vec<Rect>) {
    (
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Rect::new(300.0, 200.0, 400.0, 250.0),
        Vec::new(),
    )
}

pub fn blocked_pair() -> (Rect, Rect, Vec<Rect>) {
    (
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Rect::new(300.0, 200.0, 400.0, 250.0),
        vec![Rect::new(150.0, 0.0, 250.0, 60.0), Rect::new(120.0, 120.0, 220.0, 180.0)],
    )
}
