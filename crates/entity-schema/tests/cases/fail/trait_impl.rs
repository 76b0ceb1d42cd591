// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::entity_methods;

pub struct Article;

#[entity_methods]
impl Default for Article {
    fn default() -> Self {
        Article
    }
}

fn main() {
    let _ = Article::default();
}
