use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

const START: ParamSpec = ParamSpec::number(
    "start",
    "Response is paged. This parameter determines where the response should start.",
);
const PRIVATE: ParamSpec = ParamSpec::boolean(
    "private",
    "Should search private collection. Default searches public collection.",
);
const IMAGE_TAGS: &[ParamSpec] = &[
    ParamSpec::string("id", "Image ID").required(),
    ParamSpec::string("tags", "Comma Separated tags").required(),
];
const FONT_TAGS: &[ParamSpec] = &[
    ParamSpec::string("id", "Font ID").required(),
    ParamSpec::string("tags", "Comma Separated tags").required(),
];

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_quote_image",
        description: "Gets a Quote image for a given id. Response can be an image file as a binary or a base64 encoded contents wrapped in json.",
        method: HttpMethod::Get,
        path: "/quote/image",
        params: &[
            ParamSpec::string("id", "Quote Image id").required(),
            ParamSpec::boolean(
                "binary",
                "Should the response be a direct file download of the image or a base64 encoded image file wrapped in json?",
            ),
        ],
        shape: ResponseShape::RawFallback,
    },
    EndpointDescriptor {
        name: "put_quote_image",
        description: "Create a new quote image for a given quote. Choose background colors/images , choose different font styles and generate a beautiful quote image.",
        method: HttpMethod::Put,
        path: "/quote/image",
        params: &[
            ParamSpec::string("quote_id", "Quote id").required(),
            ParamSpec::string(
                "bgimage_id",
                "Background Image id ( Will override bgcolor if supplied)",
            ),
            ParamSpec::string(
                "bg_color",
                "Background Color(if background image id is not supplied)",
            ),
            ParamSpec::string("font_id", "Font id"),
            ParamSpec::string("text_color", "Text Color"),
            ParamSpec::string("text_size", "Text/font size"),
            ParamSpec::string("halign", "Horizontal text Alignment Value"),
            ParamSpec::string("valign", "Vertical text Alignment Value"),
            ParamSpec::number(
                "width",
                "Image Width(By default this takes the width of the background image)",
            ),
            ParamSpec::number(
                "height",
                "Image Height(By default this takes the height of the background image)",
            ),
            ParamSpec::boolean(
                "branding",
                "Disable They Said So branding (Only available in certain subscription levels. Ignored in other levels)",
            ),
            ParamSpec::boolean(
                "include_transparent_layer",
                "Should include a transparent layer between the text and the background image? This helps when the background image is bright and obscures the text.",
            ),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_image_search",
        description: "Gets a Random Quote image. Optional `category` param determines the category of quote used in the image. Optional `author` param gets the quote image of a given author.",
        method: HttpMethod::Get,
        path: "/quote/image/search",
        params: &[
            ParamSpec::string("category", "Quote Category"),
            ParamSpec::string("author", "Quote Author"),
            ParamSpec::boolean(
                "private",
                "Should search private collection. Default searches public image collection.",
            ),
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_image_background_search",
        description: "Search for background images in the platform.",
        method: HttpMethod::Get,
        path: "/quote/image/background/search",
        params: &[
            ParamSpec::string("query", "Text string to search for in background tags"),
            PRIVATE,
            START,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_image_background_list",
        description: "Lists background images in your private collection.",
        method: HttpMethod::Get,
        path: "/quote/image/background/list",
        params: &[START],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_image_background_tags_add",
        description: "Add a tag to a given Image.",
        method: HttpMethod::Post,
        path: "/quote/image/background/tags/add",
        params: IMAGE_TAGS,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_image_background_tags_remove",
        description: "Remove a tag from a given Image.",
        method: HttpMethod::Post,
        path: "/quote/image/background/tags/remove",
        params: IMAGE_TAGS,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_image_font_list",
        description: "Lists fonts in your private collection.",
        method: HttpMethod::Get,
        path: "/quote/image/font/list",
        params: &[START],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_image_font_search",
        description: "Search for fonts in the platform.",
        method: HttpMethod::Get,
        path: "/quote/image/font/search",
        params: &[
            ParamSpec::string("query", "Text string to search for in font names and tags"),
            PRIVATE,
            START,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_image_font_tags_add",
        description: "Add a tag to a given font.",
        method: HttpMethod::Post,
        path: "/quote/image/font/tags/add",
        params: FONT_TAGS,
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "post_quote_image_font_tags_remove",
        description: "Remove a tag from a given font.",
        method: HttpMethod::Post,
        path: "/quote/image/font/tags/remove",
        params: FONT_TAGS,
        shape: ResponseShape::GenericObject,
    },
];
