//! Template file contents
//!
//! Slots filled by the generator: `model_name`, `model_pascal`,
//! `model_plural`, `schema_fields`, `create_rules`, `update_rules`.

/// Mongoose model, plain and upload families
pub const MODEL: &str = r#"import mongoose from 'mongoose';

const {{model_name}}Schema = new mongoose.Schema({
{{schema_fields}}
}, { timestamps: true });

export default mongoose.model('{{model_pascal}}', {{model_name}}Schema);
"#;

/// Joi validation with create and update schemas
pub const VALIDATION: &str = r#"import joi from "joi";

export default function {{model_name}}Validation(body){
    const {{model_name}}Create = joi.object({
    {{create_rules}}
    })

    const {{model_name}}Update = joi.object({
    {{update_rules}}
    })

    return {
        {{model_name}}Create: {{model_name}}Create.validate(body),
        {{model_name}}Update: {{model_name}}Update.validate(body),
    }
}
"#;

/// Express CRUD controller
pub const CONTROLLER: &str = r#"import {{model_pascal}} from "../models/{{model_name}}.model.js"
import {{model_name}}Validation from "../validations/{{model_name}}.validation.js"

const create{{model_pascal}} = async(req,res)=>{
    try {
        const {body} = req
        if(!body){
            return res.status(400).json({message: "No data in the request"})
        }
        const {error} = {{model_name}}Validation(body).{{model_name}}Create
        if(error){
            return res.status(401).json(error.details[0].message)
        }
        const {{model_name}} = new {{model_pascal}}(body)
        const new{{model_pascal}} = await {{model_name}}.save()
        return res.status(201).json(new{{model_pascal}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const getAll{{model_pascal}}s = async(req, res) => {
    try {
        const {{model_plural}} = await {{model_pascal}}.find()
        return res.status(200).json({{model_plural}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const get{{model_pascal}}ById = async(req,res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findById(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json({{model_name}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const update{{model_pascal}} = async(req,res) => {
    try {
        const {body} = req
        if(!body){
            return res.status(400).json({message: "No data in the request"})
        }

        const {error} = {{model_name}}Validation(body).{{model_name}}Update
        if(error){
            return res.status(401).json(error.details[0].message)
        }
        const updated{{model_pascal}} = await {{model_pascal}}.findByIdAndUpdate(req.params.id, body, {new: true})
        if(!updated{{model_pascal}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json(updated{{model_pascal}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const delete{{model_pascal}} = async(req, res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findByIdAndDelete(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json({message: "{{model_name}} has been deleted"})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

export { create{{model_pascal}}, getAll{{model_pascal}}s, get{{model_pascal}}ById, update{{model_pascal}}, delete{{model_pascal}} }
"#;

/// Express router for the CRUD controller
pub const ROUTE: &str = r#"import { Router } from "express";
import { create{{model_pascal}}, getAll{{model_pascal}}s, get{{model_pascal}}ById, update{{model_pascal}}, delete{{model_pascal}} } from "../controllers/{{model_name}}.controller.js"

const router = Router()

router.post('/new', create{{model_pascal}})
router.get('/all', getAll{{model_pascal}}s)
router.get('/:id', get{{model_pascal}}ById)
router.put('/:id', update{{model_pascal}})
router.delete('/:id', delete{{model_pascal}})

export default router
"#;

/// Joi validation for uploads, create only
pub const UPLOAD_VALIDATION: &str = r#"import joi from "joi";

export default function {{model_name}}Validation(body){
    const {{model_name}}Create = joi.object({
    {{create_rules}}
    })

    return {
        {{model_name}}Create: {{model_name}}Create.validate(body),
    }
}
"#;

/// Express controller for uploads, removes stored files on failure and delete
pub const UPLOAD_CONTROLLER: &str = r#"import {{model_pascal}} from "../models/{{model_name}}.model.js"
import {{model_name}}Validation from "../validations/{{model_name}}.validation.js"
import fs from "node:fs"
import path from "node:path"
import { fileURLToPath } from "node:url";

const __filename = fileURLToPath(import.meta.url)
const __dirname = path.dirname(__filename)

const removeUpload = (req) => {
    if(req.file){fs.unlinkSync("./uploads/"+req.file.filename)}
}

const create{{model_pascal}} = async(req,res)=>{
    try {
        const {body} = req
        if(!body){
            removeUpload(req)
            return res.status(400).json({message: "No data in the request"})
        }
        if(req.file){
            body.name = req.protocol+'://'+req.get("host")+'/uploads/'+req.file.filename
        }
        const {error} = {{model_name}}Validation(body).{{model_name}}Create
        if(error){
            removeUpload(req)
            return res.status(401).json(error.details[0].message)
        }
        const {{model_name}} = new {{model_pascal}}(body)
        const new{{model_pascal}} = await {{model_name}}.save()
        return res.status(201).json(new{{model_pascal}})
    } catch (error) {
        console.log(error)
        removeUpload(req)
        res.status(500).json({message: "Server error", error: error})
    }
}

const getAll{{model_pascal}}s = async(req, res) => {
    try {
        const {{model_plural}} = await {{model_pascal}}.find()
        return res.status(200).json({{model_plural}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const get{{model_pascal}}ById = async(req,res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findById(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json({{model_name}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const delete{{model_pascal}} = async(req, res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findById(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        if({{model_name}}.name){
            const oldPath = path.join(__dirname, '../uploads/', {{model_name}}.name.split('/').at(-1))
            if(fs.existsSync(oldPath)) {fs.unlinkSync(oldPath)}
        }
        await {{model_name}}.deleteOne()
        return res.status(200).json({message: "{{model_name}} has been deleted"})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

export { create{{model_pascal}}, getAll{{model_pascal}}s, get{{model_pascal}}ById, delete{{model_pascal}} }
"#;

/// Express router for uploads, multipart on create
pub const UPLOAD_ROUTE: &str = r#"import { Router } from "express";
import { create{{model_pascal}}, getAll{{model_pascal}}s, get{{model_pascal}}ById, delete{{model_pascal}} } from "../controllers/{{model_name}}.controller.js"
import { upload } from "../middlewares/multer.js"

const router = Router()

router.post('/new', upload.single('name'), create{{model_pascal}})
router.get('/all', getAll{{model_pascal}}s)
router.get('/:id', get{{model_pascal}}ById)
router.delete('/:id', delete{{model_pascal}})

export default router
"#;

/// Multer storage middleware
pub const UPLOAD_MIDDLEWARE: &str = r#"import multer from "multer";
import path from "node:path";
import fs from "node:fs";
import { fileURLToPath } from "node:url";

const __filename = fileURLToPath(import.meta.url)
const __dirname = path.dirname(__filename)

const uploadDir = path.join(__dirname, '../uploads')
if(!fs.existsSync(uploadDir)) {fs.mkdirSync(uploadDir, {recursive: true})}

const storage = multer.diskStorage({
    destination: (req, file, cb) => {
        cb(null, uploadDir)
    },
    filename: (req, file, cb) => {
        const ext = path.extname(file.originalname)
        const baseName = path.basename(file.originalname, ext)
        cb(null, baseName+'_'+Date.now()+ext)
    }
})

const fileFilter = (req, file, cb) => {
    // allowed mimetypes
    const allowedMimeTypes = ['image/jpeg', 'image/png', 'image/gif']
    if(allowedMimeTypes.includes(file.mimetype)){
        cb(null, true)
    }else{
        cb(new Error("File type not allowed"), false)
    }
}

export const upload = multer({
    storage: storage,
    fileFilter: fileFilter,
    // max size per file and max number of files
    limits: {
        fileSize: 5 * 1024 * 1024,
        files: 5,
    }
})
"#;

/// Mongoose user model with password hashing hooks
pub const USER_MODEL: &str = r#"import mongoose from 'mongoose';
import bcrypt from 'bcrypt';

const {{model_name}}Schema = new mongoose.Schema({
{{schema_fields}}
}, { timestamps: true });

{{model_name}}Schema.pre("save", async function(){
  if(this.isModified("password")){
    this.password = await bcrypt.hash(this.password, 10)
  }
})

{{model_name}}Schema.pre("findOneAndUpdate", async function () {
  let update = this.getUpdate();

  if (update.password) {
    const hashed = await bcrypt.hash(update.password, 10);

    this.setUpdate({
      ...update,
      password: hashed
    });
  }
})

export default mongoose.model('{{model_pascal}}', {{model_name}}Schema);
"#;

/// Joi validation for users, with create, update and login schemas
pub const USER_VALIDATION: &str = r#"import joi from "joi";

export default function {{model_name}}Validation(body){
    const {{model_name}}Create = joi.object({
      email: joi.string().email().required(),
      password: joi.string().required(),
    {{create_rules}}
    })

    const {{model_name}}Update = joi.object({
      email: joi.string().email(),
      password: joi.string(),
    {{update_rules}}
    })

    const {{model_name}}Login = joi.object({
      email: joi.string().email(),
      password: joi.string(),
    })

    return {
        {{model_name}}Create: {{model_name}}Create.validate(body),
        {{model_name}}Update: {{model_name}}Update.validate(body),
        {{model_name}}Login: {{model_name}}Login.validate(body),
    }
}
"#;

/// Express controller for users, with register and login
pub const USER_CONTROLLER: &str = r#"import {{model_pascal}} from "../models/{{model_name}}.model.js"
import {{model_name}}Validation from "../validations/{{model_name}}.validation.js"
import bcrypt from 'bcrypt'
import jwt from 'jsonwebtoken'

const register = async(req,res)=>{
    try {
        const {body} = req
        if(!body){
            return res.status(400).json({message: "No data in the request"})
        }
        const {error} = {{model_name}}Validation(body).{{model_name}}Create
        if(error){
            return res.status(401).json(error.details[0].message)
        }
        const search{{model_pascal}} = await {{model_pascal}}.findOne({email: body.email})
        if(search{{model_pascal}}){
            return res.status(401).json({message: "user already exists"})
        }
        const {{model_name}} = new {{model_pascal}}(body)
        const new{{model_pascal}} = await {{model_name}}.save()
        return res.status(201).json(new{{model_pascal}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const login = async(req, res) => {
    try {
        const {email, password } = req.body
        const { error } = {{model_name}}Validation(req.body).{{model_name}}Login

        if(error){
            return res.status(401).json(error.details[0].message)
        }

        const {{model_name}} = await {{model_pascal}}.findOne({ email: email})
        if(!{{model_name}}){
            return res.status(400).json({message: "invalid credentials"})
        }
        const isMatch = await bcrypt.compare(password, {{model_name}}.password)
        if(!isMatch){
            return res.status(400).json({message: "invalid credentials"})
        }
        res.status(200).json({
            message: {{model_name}}.email+" is connected",
            token: jwt.sign({ id: {{model_name}}._id, email: {{model_name}}.email }, process.env.SECRET_KEY, { expiresIn: "12h" })
        })
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const getAll{{model_pascal}}s = async(req, res) => {
    try {
        const {{model_plural}} = await {{model_pascal}}.find()
        return res.status(200).json({{model_plural}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const get{{model_pascal}}ById = async(req,res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findById(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json({{model_name}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const update{{model_pascal}} = async(req,res) => {
    try {
        const {body} = req
        if(!body){
            return res.status(400).json({message: "No data in the request"})
        }

        const {error} = {{model_name}}Validation(body).{{model_name}}Update
        if(error){
            return res.status(401).json(error.details[0].message)
        }
        const updated{{model_pascal}} = await {{model_pascal}}.findByIdAndUpdate(req.params.id, body, {new: true})
        if(!updated{{model_pascal}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json(updated{{model_pascal}})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

const delete{{model_pascal}} = async(req, res) => {
    try {
        const {{model_name}} = await {{model_pascal}}.findByIdAndDelete(req.params.id)
        if(!{{model_name}}){
            return res.status(404).json({message: "{{model_name}} doesn't exist"})
        }
        return res.status(200).json({message: "{{model_name}} has been deleted"})
    } catch (error) {
        console.log(error)
        res.status(500).json({message: "Server error", error: error})
    }
}

export { register, login, getAll{{model_pascal}}s, get{{model_pascal}}ById, update{{model_pascal}}, delete{{model_pascal}} }
"#;

/// Express router for users
pub const USER_ROUTE: &str = r#"import { Router } from "express";
import { register, login, getAll{{model_pascal}}s, get{{model_pascal}}ById, update{{model_pascal}}, delete{{model_pascal}} } from "../controllers/{{model_name}}.controller.js"

const router = Router()

router.post('/register', register)
router.post('/login', login)
router.get('/all', getAll{{model_pascal}}s)
router.get('/:id', get{{model_pascal}}ById)
router.put('/:id', update{{model_pascal}})
router.delete('/:id', delete{{model_pascal}})

export default router
"#;

/// JWT bearer-token middleware
pub const AUTH_MIDDLEWARE: &str = r#"import jwt from "jsonwebtoken"

const auth = (req, res, next) => {
    const authHeader = req.headers['authorization'];
    const token = authHeader && authHeader.split(' ')[1];
    if (!token) {
        return res.status(401).json({ message: "Missing token" });
    }
    jwt.verify(token, process.env.SECRET_KEY, (err, user) => {
        if (err) return res.status(403).json({ message: "Invalid token" });
        req.user = user;
        next();
    });
};

export default auth;
"#;
