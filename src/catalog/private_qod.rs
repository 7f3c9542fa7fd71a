use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

const REPEAT_AFTER: ParamSpec = ParamSpec::number(
    "repeat_after",
    "How many days after the quotes can repeat? If you are setting this up from your private collection make sure you have more quotes that meet the filter conditions than the days you specify here.",
);
const AUTHORS: ParamSpec = ParamSpec::string(
    "authors",
    "Comma seperated author names. Quotes will be chosen from one of these authors.",
);
const TITLE: ParamSpec = ParamSpec::string("title", "Title of the Quote of the day category");
const PRIVATE: ParamSpec = ParamSpec::boolean(
    "private",
    "Should apply the filters to the private collection. Default is public quotes in the platform.",
);
const LANGUAGE: ParamSpec = ParamSpec::string("language", "Quotes language.");
const SFW: ParamSpec = ParamSpec::boolean(
    "sfw",
    "Consider only quotes marked as \"sfw\" (Safe for work).",
);

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "put_qod",
        description: "Create a private `Quote of the Day` service.",
        method: HttpMethod::Put,
        path: "/qod",
        params: &[REPEAT_AFTER, AUTHORS, TITLE.required(), PRIVATE, LANGUAGE, SFW],
        shape: ResponseShape::GenericArrayWrapped,
    },
    EndpointDescriptor {
        name: "patch_qod",
        description: "Update a private `Quote of the Day` service.",
        method: HttpMethod::Patch,
        path: "/qod",
        params: &[
            ParamSpec::string("id", "QOD definition id").required(),
            REPEAT_AFTER,
            AUTHORS,
            TITLE,
            PRIVATE,
            LANGUAGE,
            SFW,
        ],
        shape: ResponseShape::GenericArrayWrapped,
    },
];
