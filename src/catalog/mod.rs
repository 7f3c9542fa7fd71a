//! Every remote operation exposed as a tool, grouped by API area.
//!
//! Adding an endpoint is a matter of adding a descriptor to one of these tables.

use crate::tools::descriptor::EndpointDescriptor;

pub mod private_qod;
pub mod private_quotes;
pub mod qshow;
pub mod quote;
pub mod quote_images;
pub mod quote_of_the_day;

const AREAS: &[&[EndpointDescriptor]] = &[
    quote::TOOLS,
    private_quotes::TOOLS,
    quote_images::TOOLS,
    qshow::TOOLS,
    quote_of_the_day::TOOLS,
    private_qod::TOOLS,
];

pub fn endpoints() -> impl Iterator<Item = &'static EndpointDescriptor> {
    AREAS.iter().flat_map(|area| area.iter())
}
