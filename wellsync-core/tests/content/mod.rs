// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the content cache-and-sync layer


mod config_tests;
mod file_source_tests;
mod manager_tests;
mod query_tests;
mod repair_tests;
