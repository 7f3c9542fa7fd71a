use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

const QSHOW_ID: ParamSpec = ParamSpec::string("id", "Qshow ID").required();
const TITLE: ParamSpec = ParamSpec::string("title", "Qshow title");
const DESCRIPTION: ParamSpec = ParamSpec::string("description", "Qshow description");
const TAGS: ParamSpec = ParamSpec::string("tags", "Tags for the qshow");
const START: ParamSpec = ParamSpec::number(
    "start",
    "Response is paged. This parameter controls where response starts the listing at",
);

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_qshow",
        description: "Gets a Qshow for a given id.",
        method: HttpMethod::Get,
        path: "/qshow",
        params: &[QSHOW_ID],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_qshow_list",
        description: "Get the list of Qshows in They Said So platform.",
        method: HttpMethod::Get,
        path: "/qshow/list",
        params: &[
            START,
            ParamSpec::boolean("public", "Should include public qshows or not in the list"),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_qshow_quotes",
        description: "Gets the quotes in a given Qshow.",
        method: HttpMethod::Get,
        path: "/qshow/quotes",
        params: &[QSHOW_ID, START],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "put_qshow",
        description: "Create and add a new qshow to your private collection.",
        method: HttpMethod::Put,
        path: "/qshow",
        params: &[TITLE.required(), DESCRIPTION, TAGS],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "patch_qshow",
        description: "Update an existing qshow.",
        method: HttpMethod::Patch,
        path: "/qshow",
        params: &[QSHOW_ID, TITLE, DESCRIPTION, TAGS],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_qshow_quotes_add",
        description: "Add a quote to a given Qshow.",
        method: HttpMethod::Post,
        path: "/qshow/quotes/add",
        params: &[
            QSHOW_ID,
            ParamSpec::string("quoteid", "Quote ID to add to the qshow collection").required(),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_qshow_quotes_remove",
        description: "Remove a quote from a given Qshow.",
        method: HttpMethod::Post,
        path: "/qshow/quotes/remove",
        params: &[
            QSHOW_ID,
            ParamSpec::string("quoteid", "Quote ID to remove from the qshow collection").required(),
        ],
        shape: ResponseShape::GenericObject,
    },
];
