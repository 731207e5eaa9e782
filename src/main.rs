// Copyright 2025 the GeoCreator Authors
// SPDX-License-Identifier: Apache-2.0

//! GeoCreator: render a saved drawing to PNG

fn main() -> anyhow::Result<()> {
    geocreator::run()
}
