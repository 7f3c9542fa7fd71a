use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

const AUTHOR: ParamSpec = ParamSpec::string("author", "Quote Author");
const TAGS: ParamSpec = ParamSpec::string("tags", "Comma Separated tags");
const LANGUAGE: ParamSpec = ParamSpec::string(
    "language",
    "Language. If not supplied an auto detection mechanism will be used to detect a language.",
);
const QUOTE_ID: ParamSpec = ParamSpec::string("id", "Quote ID").required();
const NEW_QUOTE: &[ParamSpec] = &[
    ParamSpec::string("quote", "Quote").required(),
    AUTHOR,
    TAGS,
    LANGUAGE,
];
const TAG_CHANGE: &[ParamSpec] = &[QUOTE_ID, TAGS.required()];

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_quote_list",
        description: "Lists the quotes in your private collection.",
        method: HttpMethod::Get,
        path: "/quote/list",
        params: &[
            ParamSpec::number(
                "start",
                "Response is paged. This parameter controls where response starts the listing at",
            ),
            ParamSpec::number(
                "limit",
                "Response is paged. This parameter controls how many is returned in the result.",
            ),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "put_quote",
        description: "Add a new quote to your private collection.",
        method: HttpMethod::Put,
        path: "/quote",
        params: NEW_QUOTE,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote",
        description: "Add a new quote to your private collection. Same as 'PUT' but added since some clients don't handle PUT well.",
        method: HttpMethod::Post,
        path: "/quote",
        params: NEW_QUOTE,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "patch_quote",
        description: "Update a quote",
        method: HttpMethod::Patch,
        path: "/quote",
        params: &[
            QUOTE_ID,
            ParamSpec::string("quote", "Quote"),
            AUTHOR,
            LANGUAGE,
            TAGS,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_tags_add",
        description: "Add a tag to a given quote.",
        method: HttpMethod::Post,
        path: "/quote/tags/add",
        params: TAG_CHANGE,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_tags_remove",
        description: "Remove a tag from a given quote.",
        method: HttpMethod::Post,
        path: "/quote/tags/remove",
        params: TAG_CHANGE,
        shape: ResponseShape::GenericObject,
    },
];
