// Copyright 2026 The Dynagraph Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use crate::render::common::escape_xml_text;

/// A standalone HTML page embedding one or more SVG animations in a
/// flexbox grid, one cell per animation.
pub fn page(title: &str, animations: &[String]) -> String {
    let mut body = String::new();
    for animation in animations {
        body.push_str("<div class=\"cell\">\n");
        body.push_str(animation);
        body.push_str("</div>\n");
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         body {{ margin: 0; font-family: sans-serif; background: rgb(248,249,249); }}\n\
         h1 {{ margin: 8px; font-size: 16px; color: rgb(128,139,150); }}\n\
         .grid {{ display: flex; flex-wrap: wrap; }}\n\
         .cell {{ flex: 1 1 45%; margin: 8px; background: white; \
         border: 1px solid rgb(128,139,150); }}\n\
         .cell svg {{ width: 100%; height: auto; }}\n\
         </style>\n\
         <script>\n\
         function pause(svg) {{\n\
         if (svg.animationsPaused()) {{ svg.unpauseAnimations(); }}\n\
         else {{ svg.pauseAnimations(); }}\n\
         }}\n\
         </script>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <div class=\"grid\">\n\
         {body}\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape_xml_text(title),
        body = body,
    )
}

/// File name for a page title: spaces become underscores.
pub fn file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();
    format!("{stem}.html")
}
