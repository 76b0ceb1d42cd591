// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::Entity;

/// @property string $state
#[derive(Entity)]
pub enum Status {
    Draft
}

fn main() {
    let _ = Status::Draft;
}
