// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io


use std::io::{self, Write};

use anyhow::Context;
use structopt::StructOpt;

use munin::tracing::info;
use munin::{handler, logger, read, snapshot, RequestHandler, Solver};

#[derive(StructOpt)]
#[structopt(
    name = "munin",
    about = "Transport catalogue: build a binary snapshot of the network, then answer stat requests against it.",
    rename_all = "snake_case"
)]
enum Options {
    /// Read a base document on stdin and write the binary snapshot
    MakeBase,
    /// Load the snapshot and answer the stat requests read on stdin
    ProcessRequests,
}

fn main() {
    logger::init_logger();
    let options = Options::from_args();
    let result = match options {
        Options::MakeBase => make_base(),
        Options::ProcessRequests => process_requests(),
    };
    if let Err(err) = result {
        for cause in err.chain() {
            eprintln!("{}", cause);
        }
        std::process::exit(1);
    }
}

fn make_base() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let document =
        read::read_base_document(stdin.lock()).context("failed to parse the base document")?;
    let catalogue = read::build_catalogue(&document.base_requests)?;
    snapshot::save(
        &document.serialization_settings.file,
        &catalogue,
        &document.render_settings,
        &document.routing_settings,
    )?;
    Ok(())
}

fn process_requests() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let document =
        read::read_stat_document(stdin.lock()).context("failed to parse the stat document")?;
    let (catalogue, render_settings, routing_settings) =
        snapshot::load(&document.serialization_settings.file)?;

    let solver = Solver::new(&catalogue, routing_settings);
    let request_handler = RequestHandler::new(&catalogue, &render_settings, &solver);
    info!("Answering {} stat requests", document.stat_requests.len());
    let responses = request_handler.handle_all(&document.stat_requests);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handler::write_responses(&mut out, &responses)
        .context("failed to write the response document")?;
    writeln!(out)?;
    Ok(())
}
