// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::{
	fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
	layer::SubscriberExt as _,
	registry::LookupSpan,
	util::SubscriberInitExt as _,
	EnvFilter,
};


/// `timestamp|LEVEL|target|message`, one event per line.
struct PipeSeparated;

impl<S, N> FormatEvent<S, N> for PipeSeparated
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
{
	fn format_event(
		&self,
		ctx: &FmtContext<'_, S, N>,
		mut writer: Writer<'_>,
		event: &Event<'_>,
	) -> fmt::Result {
		let metadata = event.metadata();
		write!(
			writer,
			"{}|{}|{}|",
			chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
			metadata.level(),
			metadata.target(),
		)?;
		ctx.field_format().format_fields(writer.by_ref(), event)?;
		writeln!(writer)
	}
}

pub(crate) fn init() {
	let fmt_layer = tracing_subscriber::fmt::layer().event_format(PipeSeparated);
	let filter_layer = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::registry()
		.with(filter_layer)
		.with(fmt_layer)
		.init();
}
