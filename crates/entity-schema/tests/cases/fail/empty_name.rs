// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::Entity;

#[derive(Entity)]
#[entity(name = "")]
pub struct Article;

fn main() {
    let _ = Article;
}
